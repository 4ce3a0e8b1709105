#![allow(dead_code)]

mod mock_collaborators;
mod mock_transport;

pub use mock_collaborators::{RecordingNavigator, RecordingNotifier};
pub use mock_transport::MockTransport;
