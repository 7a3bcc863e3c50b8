pub mod startup_args;
