pub mod api;
pub mod poller;
pub mod status;
pub mod validator;
