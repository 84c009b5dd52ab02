mod ucb;

pub use ucb::{argmax_coin_flip, UCB1};
