pub mod assertions;
pub mod log_capture;
pub mod recording_presentation;

pub use entity_builder::TestEntityBuilder;
pub use log_capture::LogCapture;
pub use recording_presentation::{PresentationCall, RecordingPresentation};

/// Route `log` output through env_logger for the current test binary.
/// Safe to call from every test.
pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}
