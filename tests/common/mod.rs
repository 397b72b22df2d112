#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Once;
use upload_preview::FileDescriptor;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 在系统临时目录下创建唯一的测试目录
pub fn temp_dir(prefix: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("upload_preview_test");
    path.push(format!("{}_{}", prefix, uuid::Uuid::new_v4()));
    fs::create_dir_all(&path).unwrap();
    path
}

/// 写入指定大小的文件
pub fn write_file(dir: &PathBuf, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, vec![b'x'; size]).unwrap();
    path
}

pub fn sample_selection() -> Vec<FileDescriptor> {
    vec![
        FileDescriptor::new("storm_pipes.csv", 1536),
        FileDescriptor::new("inlets.csv", 10),
        FileDescriptor::new("network_export.csv", 3 * 1024 * 1024),
    ]
}
