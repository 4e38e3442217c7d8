//! 应用入口 - 展示层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、加载目录、选择获取器、创建导航器
//! 2. **命令循环**：从标准输入读取命令，转成导航操作
//! 3. **事件消费**：每个事件之后重新生成 HTML 页面，可选输出 JSON 事件

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::Config;
use crate::infrastructure::{FileFetcher, HttpFetcher, TextFetcher};
use crate::models::{builtin, load_catalog, Catalog};
use crate::orchestrator::{ChannelSink, EventSink, LoadOutcome, LogSink, Navigator, NavigatorEvent};
use crate::services::{GfmRenderer, PageBuilder};
use crate::utils::logging::{log_catalog, log_startup, log_usage};

/// 应用主结构
pub struct App {
    config: Config,
    navigator: Navigator,
    events: UnboundedReceiver<NavigatorEvent>,
    log_sink: LogSink,
    page_builder: PageBuilder,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(&config);

        let catalog = load_catalog_from(&config).await?;
        if catalog.is_empty() {
            anyhow::bail!("目录为空，没有可浏览的文档");
        }
        log_catalog(&catalog);

        let fetcher = build_fetcher(&config)?;
        let (sink, events) = ChannelSink::new();
        let navigator = Navigator::new(
            catalog,
            fetcher,
            Arc::new(GfmRenderer::new()),
            Arc::new(sink),
        );

        Ok(Self {
            config,
            navigator,
            events,
            log_sink: LogSink,
            page_builder: PageBuilder::new(),
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// 运行命令循环，直到 `quit` 或输入结束
    pub async fn run(mut self) -> Result<()> {
        log_usage();

        self.navigator.load_active().await;
        self.flush_events().await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("读取标准输入失败")? {
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = Command::parse(&line) else {
                warn!("无法识别的命令: {}", line.trim());
                continue;
            };
            if command == Command::Quit {
                break;
            }

            self.execute(command).await;
            self.flush_events().await?;
        }

        info!("👋 已退出，最后的页面保存在 {}", self.config.output_html);
        Ok(())
    }

    /// 执行一条命令
    pub async fn execute(&self, command: Command) -> LoadOutcome {
        let outcome = match command {
            Command::Step(direction) => self.navigator.step(direction).await,
            Command::Document(n) => match n.checked_sub(1) {
                Some(index) => self.navigator.select_document(index).await,
                None => LoadOutcome::Ignored,
            },
            Command::Group(tag) => self.navigator.select_group(&tag).await,
            Command::Question(n) => {
                if self.navigator.select_question(n) {
                    LoadOutcome::Ready
                } else {
                    LoadOutcome::Ignored
                }
            }
            Command::Reload => self.navigator.load_active().await,
            Command::List => {
                self.log_document_list();
                LoadOutcome::Ignored
            }
            Command::Help => {
                log_usage();
                LoadOutcome::Ignored
            }
            Command::Quit => LoadOutcome::Ignored,
        };

        if outcome == LoadOutcome::Ignored {
            debug!("命令未改变状态");
        }
        outcome
    }

    /// 处理所有已到达的事件
    pub async fn flush_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            if self.config.events_json {
                println!("{}", serde_json::to_string(&event)?);
            }
            self.log_sink.emit(event);
            self.write_page().await?;
        }
        Ok(())
    }

    async fn write_page(&self) -> Result<()> {
        let html = self
            .page_builder
            .build(&self.navigator.snapshot(), &self.navigator.document_list());
        tokio::fs::write(&self.config.output_html, html)
            .await
            .with_context(|| format!("无法写入页面: {}", self.config.output_html))?;
        debug!("页面已写入 {}", self.config.output_html);
        Ok(())
    }

    fn log_document_list(&self) {
        let snapshot = self.navigator.snapshot();
        info!("分组: {}", snapshot.active_group.as_deref().unwrap_or("-"));
        for entry in self.navigator.document_list() {
            let marker = if entry.active { "▶" } else { " " };
            info!(
                "{} {:>2}. {}",
                marker,
                entry.index + 1,
                entry.descriptor.short_title()
            );
        }
        for question in snapshot.questions() {
            info!("    Q{} {}", question.ordinal, question.label);
        }
    }
}

async fn load_catalog_from(config: &Config) -> Result<Catalog> {
    match &config.catalog_file {
        Some(path) => Ok(load_catalog(Path::new(path))
            .await
            .with_context(|| format!("无法加载目录文件: {}", path))?),
        None => Ok(builtin(&config.builtin_catalog)?),
    }
}

fn build_fetcher(config: &Config) -> Result<Arc<dyn TextFetcher>> {
    if config.is_remote() {
        let fetcher = HttpFetcher::new(
            &config.docs_base,
            Duration::from_secs(config.fetch_timeout_secs),
        )?;
        Ok(Arc::new(fetcher))
    } else {
        let fetcher = FileFetcher::new(&config.docs_base);
        info!("📂 本地文档目录: {}", fetcher.root().display());
        Ok(Arc::new(fetcher))
    }
}
