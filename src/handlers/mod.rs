//! Handler implementations and decorators

pub mod buffer;
pub mod filter;
pub mod null;
pub mod processing;
pub mod sampling;
pub mod wrapper;

pub use buffer::BufferHandler;
pub use filter::{FilterHandler, RecordPredicate};
pub use null::NullHandler;
pub use processing::{FileHandler, ProcessingHandler, StreamHandler, TestHandler};
pub use sampling::SamplingHandler;
pub use wrapper::HandlerWrapper;

pub use crate::core::{Capability, Formattable, Handler, Processable, Resettable};
