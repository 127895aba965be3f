//! Click action IDs registered by the render pass.
//!
//! Single actions take a fixed ID; families (links, categories, courses,
//! form fields) take `BASE + index`.

pub const MENU_TOGGLE: u16 = 1;
pub const CALL_PRIMARY: u16 = 2;
pub const CALL_SECONDARY: u16 = 3;
pub const WHATSAPP: u16 = 4;
pub const EXPLORE_COURSES: u16 = 5;
pub const ENQUIRE_NOW: u16 = 6;
pub const BACK_HOME: u16 = 7;
pub const SUBMIT_CONTACT: u16 = 8;
pub const SUBMIT_ENROLL: u16 = 9;
pub const CLOSE_MODAL: u16 = 10;
/// Anywhere outside the enrollment dialog while it is open.
pub const MODAL_BACKDROP: u16 = 11;
pub const HOME_LOGO: u16 = 12;
/// The dialog body itself; absorbs clicks so they don't reach the backdrop.
pub const MODAL_SURFACE: u16 = 13;

const FAMILY_SIZE: u16 = 100;

pub const NAV_LINK_BASE: u16 = 100;
pub const CATEGORY_BASE: u16 = 200;
pub const ENROLL_BASE: u16 = 300;
pub const CONTACT_FIELD_BASE: u16 = 400;
pub const MODAL_FIELD_BASE: u16 = 500;

/// A decoded action ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Single(u16),
    NavLink(usize),
    Category(usize),
    Enroll(usize),
    ContactField(usize),
    ModalField(usize),
}

pub fn decode(id: u16) -> Action {
    let index = (id % FAMILY_SIZE) as usize;
    match id - id % FAMILY_SIZE {
        NAV_LINK_BASE => Action::NavLink(index),
        CATEGORY_BASE => Action::Category(index),
        ENROLL_BASE => Action::Enroll(index),
        CONTACT_FIELD_BASE => Action::ContactField(index),
        MODAL_FIELD_BASE => Action::ModalField(index),
        _ => Action::Single(id),
    }
}

/// `base + index` as an action ID.
pub fn indexed(base: u16, index: usize) -> u16 {
    base + (index as u16 % FAMILY_SIZE)
}
