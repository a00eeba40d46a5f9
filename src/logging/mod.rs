pub mod gke;
