pub mod watch_page;
