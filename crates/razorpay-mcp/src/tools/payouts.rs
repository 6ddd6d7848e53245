//! Payouts toolset. Read-only.

use super::{COUNT, HttpMethod, Param, ParamKind, SKIP, ToolSpec};

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "fetch_payout_with_id",
        description: "Fetch payout details using its id",
        method: HttpMethod::Get,
        path: "/payouts/{payout_id}",
        params: &[Param::required(
            "payout_id",
            ParamKind::String,
            "Unique identifier of the payout (starts with pout_)",
        )],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_payouts",
        description: "Fetch all payouts for a RazorpayX bank account",
        method: HttpMethod::Get,
        path: "/payouts",
        params: &[
            Param::required(
                "account_number",
                ParamKind::String,
                "The RazorpayX account number the payouts were made from",
            ),
            COUNT,
            SKIP,
        ],
        read_only: true,
    },
];
