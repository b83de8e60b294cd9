//! The live page behind [`Surface`]: Yew state handles owned by [`App`](crate::App).

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::UseStateHandle;

use crate::model::Catalog;
use crate::surface::{Banner, Surface};

/// What the activities list is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Rc<Catalog>),
    Failed,
}

/// Signup form fields. The default is the cleared form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub email: String,
    pub selected: String,
}

/// Select options and list contents, both taken from one catalog.
pub fn catalog_view(catalog: Catalog) -> (Rc<Vec<String>>, ListState) {
    let options = Rc::new(catalog.names().map(str::to_string).collect());
    (options, ListState::Loaded(Rc::new(catalog)))
}

/// Hands out one ticket per banner; only the newest ticket is current.
#[derive(Debug, Clone, Default)]
pub struct BannerSeq {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

impl BannerSeq {
    pub fn issue(&self) -> BannerTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        BannerTicket(next)
    }

    pub fn is_current(&self, ticket: BannerTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[derive(Clone)]
pub struct PageSurface {
    pub list: UseStateHandle<ListState>,
    pub options: UseStateHandle<Rc<Vec<String>>>,
    pub banner: UseStateHandle<Option<Banner>>,
    pub form: UseStateHandle<FormState>,
    banner_seq: BannerSeq,
}

impl PageSurface {
    pub fn new(
        list: UseStateHandle<ListState>,
        options: UseStateHandle<Rc<Vec<String>>>,
        banner: UseStateHandle<Option<Banner>>,
        form: UseStateHandle<FormState>,
    ) -> Self {
        Self {
            list,
            options,
            banner,
            form,
            banner_seq: BannerSeq::default(),
        }
    }
}

impl Surface for PageSurface {
    fn render_catalog(&self, catalog: Catalog) {
        let (options, list) = catalog_view(catalog);
        self.options.set(options);
        self.list.set(list);
    }

    fn show_load_failure(&self) {
        self.list.set(ListState::Failed);
    }

    fn show_banner(&self, banner: Banner) {
        let ticket = self.banner_seq.issue();
        let millis = u32::try_from(banner.hide_after.as_millis()).unwrap_or(u32::MAX);
        self.banner.set(Some(banner));

        let seq = self.banner_seq.clone();
        let handle = self.banner.clone();
        Timeout::new(millis, move || {
            if seq.is_current(ticket) {
                handle.set(None);
            }
        })
        .forget();
    }

    fn reset_form(&self) {
        self.form.set(FormState::default());
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
