//! Refunds toolset.

use super::{COUNT, FROM, HttpMethod, NOTES, Param, ParamKind, SKIP, TO, ToolSpec};

const PAYMENT_ID: Param = Param::required(
    "payment_id",
    ParamKind::String,
    "Unique identifier of the payment (starts with pay_)",
);
const REFUND_ID: Param = Param::required(
    "refund_id",
    ParamKind::String,
    "Unique identifier of the refund (starts with rfnd_)",
);

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "create_refund",
        description: "Use this tool to create a normal refund for a payment. \
                      Amount should be in the smallest currency unit (e.g. for 295, use 29500)",
        method: HttpMethod::Post,
        path: "/payments/{payment_id}/refund",
        params: &[
            PAYMENT_ID,
            Param::optional(
                "amount",
                ParamKind::Number,
                "Refund amount in the smallest currency unit; omit for a full refund",
            ),
            Param::optional(
                "speed",
                ParamKind::String,
                "Refund speed: 'normal' (default) or 'optimum'",
            ),
            Param::optional("receipt", ParamKind::String, "Unique identifier for the refund"),
            NOTES,
        ],
        read_only: false,
    },
    ToolSpec {
        name: "fetch_refund",
        description: "Use this tool to retrieve the details of a specific refund using its id.",
        method: HttpMethod::Get,
        path: "/refunds/{refund_id}",
        params: &[REFUND_ID],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_all_refunds",
        description: "Use this tool to retrieve all refunds. \
                      By default only the last 10 refunds are returned.",
        method: HttpMethod::Get,
        path: "/refunds",
        params: &[COUNT, SKIP, FROM, TO],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_multiple_refunds_for_payment",
        description: "Use this tool to retrieve multiple refunds for a payment. \
                      By default only the last 10 refunds are returned.",
        method: HttpMethod::Get,
        path: "/payments/{payment_id}/refunds",
        params: &[PAYMENT_ID, COUNT, SKIP, FROM, TO],
        read_only: true,
    },
    ToolSpec {
        name: "fetch_specific_refund_for_payment",
        description: "Use this tool to retrieve details of a specific refund made for a payment.",
        method: HttpMethod::Get,
        path: "/payments/{payment_id}/refunds/{refund_id}",
        params: &[PAYMENT_ID, REFUND_ID],
        read_only: true,
    },
    ToolSpec {
        name: "update_refund",
        description: "Use this tool to update the notes for a specific refund. \
                      Only the notes field can be modified.",
        method: HttpMethod::Patch,
        path: "/refunds/{refund_id}",
        params: &[
            REFUND_ID,
            Param::required(
                "notes",
                ParamKind::Object,
                "Key-value pairs to store on the refund (max 15 pairs, 256 chars each)",
            ),
        ],
        read_only: false,
    },
];
