//! The single-order pipeline
//!
//! validate -> connect -> balance -> (round) -> submit -> print.
//! Validation and credential checks finish before the first network call.

use std::future::Future;
use std::io::Write;

use ordo_core::{OrderRequest, OrderRequestBuilder, OrderResult};
use ordo_gateway::{Credentials, GatewayConfig};
use ordo_ports::{ApiError, ApiResult, FuturesApi};
use tracing::{error, info, warn};

use crate::cli::Cli;
use crate::config::RunOptions;
use crate::error::RunError;

/// Run one invocation of the tool
///
/// `connect` opens the exchange session; it is only called once the
/// input has been validated and credentials resolved. Every failure is
/// logged exactly once before it is returned.
pub async fn run<A, C, Fut, W>(
    cli: &Cli,
    connect: C,
    out: &mut W,
) -> Result<OrderResult, RunError>
where
    A: FuturesApi,
    C: FnOnce(GatewayConfig, Credentials) -> Fut,
    Fut: Future<Output = ApiResult<A>>,
    W: Write,
{
    execute(cli, connect, out).await.inspect_err(|e| {
        // exchange errors were logged with their status where they occurred
        if !matches!(e, RunError::Api(_)) {
            error!("{}", e);
        }
    })
}

async fn execute<A, C, Fut, W>(
    cli: &Cli,
    connect: C,
    out: &mut W,
) -> Result<OrderResult, RunError>
where
    A: FuturesApi,
    C: FnOnce(GatewayConfig, Credentials) -> Fut,
    Fut: Future<Output = ApiResult<A>>,
    W: Write,
{
    let request = OrderRequestBuilder::new(cli.order_params()).build()?;
    let credentials = cli.credentials()?;

    let environment = cli.environment();
    let api = connect(cli.gateway_config(), credentials)
        .await
        .inspect_err(|e| log_api_error("API connection failed", e))?;
    info!("Connected in {} mode", environment.label());

    place_order(&api, request, &cli.run_options(), out).await
}

/// Show the balance, then submit `request` and print the exchange's answer
pub async fn place_order<A, W>(
    api: &A,
    request: OrderRequest,
    options: &RunOptions,
    out: &mut W,
) -> Result<OrderResult, RunError>
where
    A: FuturesApi + ?Sized,
    W: Write,
{
    let balance = api
        .balance(&options.asset)
        .await
        .inspect_err(|e| log_api_error("Failed to get balance", e))?;
    writeln!(out)?;
    writeln!(out, "Available {} balance: {:.2}", options.asset, balance)?;

    let request = if options.round_quantity {
        round_to_lot(api, request).await?
    } else {
        request
    };

    info!(
        symbol = %request.symbol,
        side = %request.side,
        order_type = request.order_type().wire_name(),
        quantity = %request.quantity,
        price = ?request.price(),
        stop_price = ?request.stop_price(),
        callback_rate = ?request.callback_rate(),
        activation_price = ?request.activation_price(),
        "Submitting order"
    );

    let result = api
        .submit_order(&request)
        .await
        .inspect_err(|e| log_api_error("Order rejected", e))?;
    info!(
        order_id = result.order_id,
        status = %result.status,
        "Order placed successfully: {:?}",
        result
    );

    render_result(out, &result)?;
    Ok(result)
}

async fn round_to_lot<A>(api: &A, request: OrderRequest) -> Result<OrderRequest, RunError>
where
    A: FuturesApi + ?Sized,
{
    let lot = api
        .lot_size(&request.symbol)
        .await
        .inspect_err(|e| log_api_error("Failed to get LOT_SIZE rules", e))?;
    let Some(lot) = lot else {
        warn!(
            "No LOT_SIZE rules for {}, quantity left at {}",
            request.symbol, request.quantity
        );
        return Ok(request);
    };

    let quantity = lot.round_quantity(request.quantity)?;
    if quantity != request.quantity {
        info!(
            "Rounded quantity {} -> {} (step {})",
            request.quantity, quantity, lot.step_size
        );
    }
    Ok(request.with_quantity(quantity))
}

fn log_api_error(context: &str, err: &ApiError) {
    match err.status() {
        Some(status) => error!(status = status, "{}: {}", context, err),
        None => error!("{}: {}", context, err),
    }
}

/// Print the order block shown after a successful submit
pub fn render_result<W: Write>(out: &mut W, result: &OrderResult) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Order Result:")?;
    writeln!(out, "Order ID: {}", result.order_id)?;
    writeln!(out, "Symbol: {}", result.symbol)?;
    writeln!(out, "Type: {}", result.order_type)?;
    writeln!(out, "Side: {}", result.side)?;
    writeln!(out, "Quantity: {}", result.orig_qty)?;
    writeln!(out, "Status: {}", result.status)?;
    if let Some(price) = result.price {
        writeln!(out, "Price: {}", price)?;
    }
    if let Some(stop_price) = result.stop_price {
        writeln!(out, "Stop Price: {}", stop_price)?;
    }
    Ok(())
}
