//! Input widgets for the add/edit form.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

pub mod text_area;
pub mod text_input;

pub use text_area::TextAreaWidget;
pub use text_input::TextInput;
