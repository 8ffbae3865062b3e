pub mod highgui_sink;
