pub mod caffe_ssd_detector;
