mod friendship;
mod message;
mod user;
