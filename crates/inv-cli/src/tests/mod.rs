mod client;
mod routes;
