mod test_server;

pub use test_server::TestServer;

pub const TEST_BUCKET: &str = "b1";
