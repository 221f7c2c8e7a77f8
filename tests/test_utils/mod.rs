pub mod mock_server;

pub mod shared_buffer;

#[allow(unused_imports)]
pub use mock_server::{
    CapturedRequest, base_address, closed_address, spawn_server, spawn_silent_server,
    tcp_listener,
};
#[allow(unused_imports)]
pub use shared_buffer::{SharedBuf, read_output};
