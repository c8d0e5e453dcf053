pub mod locatieserver;
