//! CSV adapters: the rate feed parser and the batch loan reader/writer.

pub mod loan_reader;
pub mod rate_feed;
pub mod repayment_writer;
