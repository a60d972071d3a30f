mod favorites_flow;
mod helpers;
mod navigation;
mod range_view;
mod session_watch;
