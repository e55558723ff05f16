pub mod clock;
pub mod controller;
pub mod frame_sink;
pub mod input_adapter;
pub mod window;

pub use clock::Clock;
pub use controller::{Button, ButtonState, InputEvent};
pub use frame_sink::{FrameSink, RecordingSink};
pub use input_adapter::InputAdapter;
pub use window::{FramebufferSize, WindowContext};
