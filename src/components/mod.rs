//! Page pieces.

mod activity_card;
mod activity_list;
mod message_banner;
mod participant_pill;
mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use message_banner::MessageBanner;
pub use participant_pill::ParticipantPill;
pub use signup_form::SignupForm;
