use anyhow::Result;
use progress_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, port: u16, no_open: bool) -> Result<()> {
    let config = Config::load(root)?;
    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!(
            "Progress dashboard for '{}' → http://localhost:{actual_port}  (PID {})",
            config.project,
            std::process::id()
        );

        tokio::select! {
            res = progress_server::serve_on(root_buf, config, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
