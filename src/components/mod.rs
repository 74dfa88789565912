pub mod force_graph;
pub mod legend;
pub mod stat_card;
