use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::{
    ai::OpenAiClient,
    analysis::{Analyzer, ContentSource, VerdictSource},
    config::AppConfig,
    domain::AnalysisReport,
    infrastructure::shutdown::ShutdownListener,
    report::render_report,
    web_content::WebContentFetcher,
};

const INPUT_PROMPT: &str = "Enter a URL to analyze: ";

pub struct PhishGuardApp<F = WebContentFetcher, V = OpenAiClient> {
    analyzer: Analyzer<F, V>,
}

impl PhishGuardApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("phishguard/{}", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let openai = OpenAiClient::new(http_client.clone(), config.openai.clone());
        let fetcher = WebContentFetcher::new(http_client, config.web.clone());

        tracing::info!(
            target: "app",
            model = %config.openai.model,
            endpoint = %config.openai.api_url,
            fetch_timeout_ms = config.web.fetch_timeout.as_millis() as u64,
            "phishguard initialized"
        );

        Ok(Self {
            analyzer: Analyzer::new(fetcher, openai),
        })
    }

    /// Analyzes `urls` in order, or prompts on stdin when none are given.
    pub async fn run(self, urls: Vec<String>, mut listener: ShutdownListener) -> Result<()> {
        let mut stdout = io::stdout();
        if urls.is_empty() {
            let stdin = BufReader::new(io::stdin());
            self.run_interactive(stdin, &mut stdout, &mut listener)
                .await?;
        } else {
            self.run_urls(&urls, &mut stdout, &mut listener).await?;
        }

        tracing::debug!(target: "app", "phishguard finished");
        Ok(())
    }
}

impl<F, V> PhishGuardApp<F, V>
where
    F: ContentSource,
    V: VerdictSource,
{
    async fn run_urls<W>(
        &self,
        urls: &[String],
        output: &mut W,
        listener: &mut ShutdownListener,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        for url in urls {
            if listener.is_triggered() {
                break;
            }
            let Some(report) = self.analyze(url, listener).await else {
                break;
            };
            write_report(output, &report).await?;
        }
        Ok(())
    }

    /// Prompt loop: blank lines are skipped, EOF or shutdown ends it.
    async fn run_interactive<R, W>(
        &self,
        input: R,
        output: &mut W,
        listener: &mut ShutdownListener,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            output.write_all(INPUT_PROMPT.as_bytes()).await?;
            output.flush().await?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = listener.notified() => None,
            };
            let Some(line) = line else {
                output.write_all(b"\n").await?;
                break;
            };

            let url = line.trim();
            if url.is_empty() {
                continue;
            }

            let Some(report) = self.analyze(url, listener).await else {
                break;
            };
            write_report(output, &report).await?;
        }
        output.flush().await?;
        Ok(())
    }

    async fn analyze(&self, url: &str, listener: &mut ShutdownListener) -> Option<AnalysisReport> {
        tokio::select! {
            report = self.analyzer.analyze(url) => {
                tracing::debug!(target: "app", url, label = ?report.label(), "analysis finished");
                Some(report)
            }
            _ = listener.notified() => {
                tracing::info!(target: "app", url, "shutdown requested during analysis; aborting");
                None
            }
        }
    }
}

async fn write_report<W>(output: &mut W, report: &AnalysisReport) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(render_report(report).as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
