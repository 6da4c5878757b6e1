use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use import_marketplace::config::EnvironmentConfig;
use import_marketplace::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env();

    // Configurar logging
    let level = config.log_level.parse().unwrap_or(tracing::Level::DEBUG);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Import Marketplace API");
    info!("================================================");
    info!(
        "⚙️ Entorno: {} | LKR/USD: {} | tasa por defecto: {}% a {} meses",
        config.environment,
        config.lkr_per_usd,
        config.default_interest_rate,
        config.default_loan_term
    );

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Marketplace:");
    info!("   GET  /api/vehicles - Listar y filtrar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   GET  /api/vehicles/:id/cost-form - Formulario de costo precargado");
    info!("💰 Cotizaciones:");
    info!("   POST /api/quotes/landed-cost - Costo total de importación");
    info!("   POST /api/quotes/emi - Cuota mensual");
    info!("   POST /api/quotes/marketplace - Costo + cuota del marketplace");
    info!("   POST /api/financing/applications/validate - Validar solicitud de crédito");
    info!("   GET  /api/checkout/:vehicle_id - Resumen de checkout");
    info!("📦 Pedidos:");
    info!("   GET  /api/orders - Listar pedidos");
    info!("   GET  /api/orders/:id - Pedido y línea de tiempo");
    info!("   GET  /api/orders/:id/notifications - Notificaciones");
    info!("   GET  /api/orders/:id/documents - Documentos");
    info!("   GET  /api/orders/:id/audit - Auditoría de documentos");
    info!("🧭 Navegación:");
    info!("   GET  /api/navigation/items - Menú principal");
    info!("   POST /api/navigation/transition - Aplicar evento de navegación");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
