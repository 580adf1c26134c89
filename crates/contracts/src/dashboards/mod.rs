pub mod d400_rentals_report;
