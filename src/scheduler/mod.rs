pub mod auction_sweep;
