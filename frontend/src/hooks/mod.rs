pub mod use_guide_form;
pub mod use_guides;

pub use use_guide_form::use_guide_form;
pub use use_guides::use_guides;
