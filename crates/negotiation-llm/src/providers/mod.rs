pub mod echo;
pub mod http;

pub use echo::EchoGenerator;
pub use http::HttpGenerator;
