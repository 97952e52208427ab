mod auction;
mod bid;
mod offer;
mod order;
mod user;
mod vehicle;
