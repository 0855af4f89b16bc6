pub mod auth_responder;
