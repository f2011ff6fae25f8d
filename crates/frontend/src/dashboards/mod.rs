pub mod d100_inventory_overview;
