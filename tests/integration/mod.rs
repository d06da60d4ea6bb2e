mod cli_test;
mod colorize_test;
mod render_test;
