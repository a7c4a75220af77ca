mod handlers;
mod process;
mod routes;

pub use routes::create_router;
