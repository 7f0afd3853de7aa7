pub mod selector_computer;
