//! Settlements toolset. Read-only.

use super::{COUNT, FROM, HttpMethod, Param, ParamKind, SKIP, TO, ToolSpec};

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "fetch_settlement_with_id",
        description: "Fetch details of a specific settlement using its id",
        method: HttpMethod::Get,
        path: "/settlements/{settlement_id}",
        params: &[Param::required(
            "settlement_id",
            ParamKind::String,
            "Unique identifier of the settlement (starts with setl_)",
        )],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_settlements",
        description: "Fetch all settlements with optional filtering and pagination",
        method: HttpMethod::Get,
        path: "/settlements",
        params: &[COUNT, SKIP, FROM, TO],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_settlement_recon_details",
        description: "Fetch settlement reconciliation report for a specific time period",
        method: HttpMethod::Get,
        path: "/settlements/recon/combined",
        params: &[
            Param::required("year", ParamKind::Integer, "Year of the report (e.g. 2024)"),
            Param::required("month", ParamKind::Integer, "Month of the report (1-12)"),
            Param::optional("day", ParamKind::Integer, "Day of the report (1-31)"),
            COUNT,
            SKIP,
        ],
        read_only: true,
    },
];
