use std::env;

use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*, util::TryInitError, Registry};

/// ログの出力先を絞り込む環境変数
///
/// 例: `SORTED_INT_LIST_LOG=sorted_int_list=trace`
pub const LOG_ENV: &str = "SORTED_INT_LIST_LOG";

fn targets() -> Targets {
    env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(Level::WARN))
}

/// 標準エラー出力へのsubscriberをグローバルに登録する
///
/// 既に登録済みの場合はErrを返すだけで、パニックはしない
pub fn install() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(targets());
    Registry::default().with(fmt_layer).try_init()
}
