use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use serde_json::json;
use tracing::debug;

use posh_common::PoshConfig;
use posh_core::{
    BoundedQueue, JoinOptions, Rgba, darken, extract_match, join_list, medium_timestamp,
    none_if_blank, ordinal, start_of_day, start_of_next_day,
};

use crate::commands::OutputFormat;
use crate::commands::RoundMode;
use crate::error::CliError;
use crate::presenter::{Presenter, create_presenter};

pub type HandlerResult = Result<(), CliError>;

pub struct HandlerContext<W: Write> {
    pub config: PoshConfig,
    pub format: OutputFormat,
    out: W,
    presenter: Box<dyn Presenter>,
}

impl<W: Write> HandlerContext<W> {
    pub fn new(config: PoshConfig, format: OutputFormat, out: W) -> Self {
        let presenter = create_presenter(&format);
        Self {
            config,
            format,
            out,
            presenter,
        }
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, text: Option<&str>, value: &Value) -> HandlerResult {
        self.presenter.present(&mut self.out, text, value)?;
        Ok(())
    }
}

#[tracing::instrument(skip(ctx))]
pub fn handle_join<W: Write>(
    ctx: &mut HandlerContext<W>,
    fragments: Vec<String>,
    conjunction: Option<String>,
    oxford_comma: Option<bool>,
) -> HandlerResult {
    let options = JoinOptions::default()
        .with_conjunction(conjunction.unwrap_or_else(|| ctx.config.conjunction.clone()))
        .with_oxford_comma(oxford_comma.unwrap_or(ctx.config.oxford_comma));
    let joined = join_list(&fragments, &options);
    ctx.emit(Some(&joined), &json!({ "result": joined }))
}

#[tracing::instrument(skip(ctx))]
pub fn handle_ordinal<W: Write>(ctx: &mut HandlerContext<W>, numbers: Vec<u64>) -> HandlerResult {
    let rendered: Vec<String> = numbers.into_iter().map(ordinal).collect();
    let text = rendered.join("\n");
    ctx.emit(Some(&text), &json!({ "ordinals": rendered }))
}

#[tracing::instrument(skip(ctx))]
pub fn handle_extract<W: Write>(
    ctx: &mut HandlerContext<W>,
    pattern: String,
    text: String,
) -> HandlerResult {
    let found = extract_match(&pattern, &text)?;
    if found.is_none() {
        debug!("pattern did not match the whole input");
    }
    ctx.emit(found.as_deref(), &json!({ "match": found }))
}

#[tracing::instrument(skip(ctx))]
pub fn handle_queue<W: Write>(
    ctx: &mut HandlerContext<W>,
    capacity: Option<i64>,
    elements: Vec<String>,
) -> HandlerResult {
    let mut queue = match capacity {
        Some(capacity) => BoundedQueue::try_new(capacity)?,
        None => BoundedQueue::new(ctx.config.queue_capacity),
    };

    let mut evicted = Vec::new();
    for element in elements {
        if let Some(dropped) = queue.push(element) {
            evicted.push(dropped);
        }
    }
    debug!(kept = queue.len(), evicted = evicted.len(), "queue drained");

    let capacity = queue.capacity();
    let kept = queue.into_vec();
    let text = (!kept.is_empty()).then(|| kept.join("\n"));
    let value = json!({
        "capacity": capacity,
        "elements": kept,
        "evicted": evicted,
    });
    ctx.emit(text.as_deref(), &value)
}

#[tracing::instrument(skip(ctx))]
pub fn handle_darken<W: Write>(
    ctx: &mut HandlerContext<W>,
    color: String,
    amount: f64,
    alpha: f64,
) -> HandlerResult {
    let base = Rgba {
        alpha,
        ..Rgba::parse_hex(&color)?
    };
    let darker = darken(base, amount);
    let hex = darker.to_hex();
    let value = json!({
        "hex": hex,
        "rgba": serde_json::to_value(darker)?,
    });
    ctx.emit(Some(&hex), &value)
}

#[tracing::instrument(skip(ctx))]
pub fn handle_timestamp<W: Write>(
    ctx: &mut HandlerContext<W>,
    at: Option<String>,
    round: RoundMode,
) -> HandlerResult {
    match at {
        Some(input) => {
            let parsed = DateTime::parse_from_rfc3339(&input).map_err(|e| {
                CliError::InvalidTimestamp {
                    input: input.clone(),
                    reason: e.to_string(),
                }
            })?;
            emit_timestamp(ctx, &parsed, round)
        }
        None => emit_timestamp(ctx, &Local::now(), round),
    }
}

fn emit_timestamp<W, Tz>(
    ctx: &mut HandlerContext<W>,
    value: &DateTime<Tz>,
    round: RoundMode,
) -> HandlerResult
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let rounded = match round {
        RoundMode::None => value.clone(),
        RoundMode::Down => start_of_day(value)?,
        RoundMode::Up => start_of_next_day(value)?,
    };
    let formatted = medium_timestamp(&rounded);
    let value = json!({
        "timestamp": formatted,
        "rfc3339": rounded.to_rfc3339(),
    });
    ctx.emit(Some(&formatted), &value)
}

#[tracing::instrument(skip(ctx))]
pub fn handle_trim<W: Write>(ctx: &mut HandlerContext<W>, text: String) -> HandlerResult {
    let trimmed = none_if_blank(&text);
    ctx.emit(trimmed, &json!({ "text": trimmed }))
}
