use anyhow::Result;
use question_dupcheck::{logger, App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load_or_default(&Config::default_config_path())?;

    // 初始化并运行应用
    App::initialize(config)?.run()
}
