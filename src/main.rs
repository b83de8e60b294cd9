fn main() {
    activity_signup::start();
}
