//! Shared testing utilities for senaite-init CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STOCK_ZOPE_CONF: &str = "\
%define INSTANCEHOME /home/senaite/senaitelims/parts/instance
instancehome $INSTANCEHOME
<http-server>
  address 8080
</http-server>
<zodb_db main>
    # Main database
    cache-size 30000
    <blobstorage>
      blob-dir /data/blobstorage
      <filestorage>
        path /data/filestorage/Data.fs
      </filestorage>
    </blobstorage>
    mount-point /
</zodb_db>
";

pub const STOCK_ZEOPACK: &str = r#"#!/usr/local/bin/python

import sys
sys.path[0:0] = []

host = "127.0.0.1"
port = "8100"
unix = None
storage = "1"
blob_dir = "/data/blobstorage"
username = None
password = None
realm = None
days = "1"
address = "127.0.0.1:8100"

import plone.recipe.zeoserver.pack

if __name__ == '__main__':
    sys.exit(plone.recipe.zeoserver.pack.main(host, port, unix, days, username, password, realm, blob_dir, storage))
"#;

pub const STOCK_ZEO_CONF: &str = "\
%define INSTANCE /home/senaite/senaitelims/parts/zeo
<zeo>
  address 8100
  read-only false
  invalidation-queue-size 100
  pid-filename $INSTANCE/var/zeo.pid
</zeo>

<filestorage 1>
  path /data/filestorage/Data.fs
  blob-dir /data/blobstorage
</filestorage>
";

/// Isolated instance home with the stock configuration files of the image.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an instance home containing zope.conf, zeopack and parts/zeo/etc/zeo.conf.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write("parts/instance/etc/zope.conf", STOCK_ZOPE_CONF);
        ctx.write("bin/zeopack", STOCK_ZEOPACK);
        ctx.write("parts/zeo/etc/zeo.conf", STOCK_ZEO_CONF);
        ctx
    }

    /// Create an instance home with no files at all.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("Failed to create parent directory");
        fs::write(path, content).expect("Failed to write fixture");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Build a command for the compiled binary rooted at this instance home,
    /// with an empty environment so the host's variables do not leak in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("senaite-init").expect("Failed to locate senaite-init binary");
        cmd.env_clear().current_dir(self.home()).arg("--instance-home").arg(self.home());
        cmd
    }
}
