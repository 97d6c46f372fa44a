pub mod fee_row;
