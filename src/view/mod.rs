//! Derived binder views for the presentation layer.

pub mod cache;

pub use cache::BinderView;
