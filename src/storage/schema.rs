//! # Ledger Schema
//!
//! Table names and header rows for the shop workbook. The names stay in
//! Spanish because they are the on-disk format shared with the spreadsheets
//! the shop already keeps; changing them would orphan the existing data.

/// Timestamp format used in every date cell, e.g. `2026-08-23 14:05:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Customer registry table.
pub const CUSTOMERS_TABLE: &str = "Clientes";
pub const CUSTOMER_HEADERS: [&str; 4] = ["ID Cliente", "Nombre", "Telefono", "Direccion"];

/// Orders table, one row per placed order, settlement columns updated in place.
pub const ORDERS_TABLE: &str = "Pedidos";
pub const ORDER_HEADERS: [&str; 12] = [
    "ID Pedido",
    "Fecha",
    "ID Cliente",
    "Nombre Cliente",
    "Productos_detalle",
    "Subtotal_productos",
    "Monto_domicilio",
    "Total_pedido",
    "Estado",
    "Medio_pago",
    "Monto_pagado",
    "Saldo_pendiente",
];

/// Stock-on-hand table, one row per tracked product.
pub const INVENTORY_TABLE: &str = "Inventario";
pub const INVENTORY_HEADERS: [&str; 2] = ["Producto", "Stock"];

/// Append-only income journal, one row per settlement.
pub const CASH_FLOW_TABLE: &str = "FlujoCaja";
pub const CASH_FLOW_HEADERS: [&str; 7] = [
    "Fecha",
    "ID Pedido",
    "Cliente",
    "Medio_pago",
    "Ingreso_productos_recibido",
    "Ingreso_domicilio_recibido",
    "Saldo_pendiente_total",
];

/// Append-only expense journal.
pub const EXPENSES_TABLE: &str = "Gastos";
pub const EXPENSE_HEADERS: [&str; 3] = ["Fecha", "Concepto", "Monto"];
