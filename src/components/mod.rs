pub mod contact_graph;
