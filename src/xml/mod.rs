//! Minimal tree model over `quick-xml` pull events.
//!
//! Card definition files are small enough to hold in memory, and the field
//! descriptors need random access to an entity's children, so the event
//! stream is folded into an owned `Element` tree once per document.

pub mod element;

pub use element::Element;
