use crate::config::Config;
use crate::utils::logging::log_startup;
use crate::workflow::CheckFlow;
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    flow: CheckFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.document_path);
        let flow = CheckFlow::new(&config);
        Ok(Self { config, flow })
    }

    /// 运行检查并把报告打印到标准输出
    pub fn run(&self) -> Result<()> {
        let outcome = self.flow.run()?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(outcome.report.as_bytes())?;
        stdout.flush()?;

        info!(
            "✓ 检查完成: {} 道题目 ({})",
            outcome.total,
            self.config.document_path.display()
        );
        Ok(())
    }
}
