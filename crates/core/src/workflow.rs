//! Status enums and their allowed transitions.
//!
//! Every multi-step entity (lead funnel, project lifecycle, orders,
//! materials) moves along a linear happy path with a small number of
//! terminal escapes. Handlers call [`can_transition_to`] before writing a
//! status change and reject illegal edges with a conflict.
//!
//! [`can_transition_to`]: LeadStatus::can_transition_to

use serde::{Deserialize, Serialize};

/// Lead funnel status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "lead_status", rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Dropped,
}

impl LeadStatus {
    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// The funnel is strictly linear (`new -> contacted -> qualified ->
    /// converted`); `dropped` is reachable from any non-terminal state.
    pub fn can_transition_to(self, next: LeadStatus) -> bool {
        use LeadStatus::*;
        matches!(
            (self, next),
            (New, Contacted)
                | (Contacted, Qualified)
                | (Qualified, Converted)
                | (New, Dropped)
                | (Contacted, Dropped)
                | (Qualified, Dropped)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, LeadStatus::Converted | LeadStatus::Dropped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Dropped => "dropped",
        }
    }
}

/// Project (interior engagement) lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatus {
    Enquiry,
    Design,
    Production,
    Installation,
    Handover,
    Closed,
    Cancelled,
}

impl ProjectStatus {
    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// The lifecycle advances one stage at a time. `closed` is only
    /// reachable from `handover` (via the closure record); `cancelled`
    /// is reachable from any active stage.
    pub fn can_transition_to(self, next: ProjectStatus) -> bool {
        use ProjectStatus::*;
        if self.is_terminal() {
            return false;
        }
        match (self, next) {
            (Enquiry, Design)
            | (Design, Production)
            | (Production, Installation)
            | (Installation, Handover)
            | (Handover, Closed) => true,
            (_, Cancelled) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectStatus::Closed | ProjectStatus::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Enquiry => "enquiry",
            ProjectStatus::Design => "design",
            ProjectStatus::Production => "production",
            ProjectStatus::Installation => "installation",
            ProjectStatus::Handover => "handover",
            ProjectStatus::Closed => "closed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

/// Interior order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "interior_order_status", rename_all = "snake_case")]
pub enum InteriorOrderStatus {
    Draft,
    Confirmed,
    InProduction,
    Delivered,
    Cancelled,
}

impl InteriorOrderStatus {
    pub fn can_transition_to(self, next: InteriorOrderStatus) -> bool {
        use InteriorOrderStatus::*;
        matches!(
            (self, next),
            (Draft, Confirmed)
                | (Confirmed, InProduction)
                | (InProduction, Delivered)
                | (Draft, Cancelled)
                | (Confirmed, Cancelled)
                | (InProduction, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InteriorOrderStatus::Delivered | InteriorOrderStatus::Cancelled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteriorOrderStatus::Draft => "draft",
            InteriorOrderStatus::Confirmed => "confirmed",
            InteriorOrderStatus::InProduction => "in_production",
            InteriorOrderStatus::Delivered => "delivered",
            InteriorOrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Catalog (checkout) order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Paid, Shipped)
                | (Shipped, Completed)
                | (Pending, Cancelled)
                | (Paid, Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Tracked material status within a project. Forward-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "material_status", rename_all = "snake_case")]
pub enum MaterialStatus {
    Ordered,
    Received,
    Installed,
}

impl MaterialStatus {
    pub fn can_transition_to(self, next: MaterialStatus) -> bool {
        use MaterialStatus::*;
        matches!((self, next), (Ordered, Received) | (Received, Installed))
    }
}

/// Kind of media attached to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "media_kind", rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Render,
    Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_funnel_is_linear() {
        assert!(LeadStatus::New.can_transition_to(LeadStatus::Contacted));
        assert!(LeadStatus::Contacted.can_transition_to(LeadStatus::Qualified));
        assert!(LeadStatus::Qualified.can_transition_to(LeadStatus::Converted));

        // No skipping stages.
        assert!(!LeadStatus::New.can_transition_to(LeadStatus::Qualified));
        assert!(!LeadStatus::New.can_transition_to(LeadStatus::Converted));
        // No going backwards.
        assert!(!LeadStatus::Qualified.can_transition_to(LeadStatus::Contacted));
    }

    #[test]
    fn lead_can_be_dropped_until_terminal() {
        assert!(LeadStatus::New.can_transition_to(LeadStatus::Dropped));
        assert!(LeadStatus::Contacted.can_transition_to(LeadStatus::Dropped));
        assert!(LeadStatus::Qualified.can_transition_to(LeadStatus::Dropped));

        assert!(!LeadStatus::Converted.can_transition_to(LeadStatus::Dropped));
        assert!(!LeadStatus::Dropped.can_transition_to(LeadStatus::New));
    }

    #[test]
    fn project_advances_one_stage_at_a_time() {
        assert!(ProjectStatus::Enquiry.can_transition_to(ProjectStatus::Design));
        assert!(ProjectStatus::Design.can_transition_to(ProjectStatus::Production));
        assert!(ProjectStatus::Production.can_transition_to(ProjectStatus::Installation));
        assert!(ProjectStatus::Installation.can_transition_to(ProjectStatus::Handover));
        assert!(ProjectStatus::Handover.can_transition_to(ProjectStatus::Closed));

        assert!(!ProjectStatus::Enquiry.can_transition_to(ProjectStatus::Production));
        assert!(!ProjectStatus::Production.can_transition_to(ProjectStatus::Closed));
    }

    #[test]
    fn project_cancellable_from_any_active_stage() {
        for status in [
            ProjectStatus::Enquiry,
            ProjectStatus::Design,
            ProjectStatus::Production,
            ProjectStatus::Installation,
            ProjectStatus::Handover,
        ] {
            assert!(status.can_transition_to(ProjectStatus::Cancelled));
        }
        assert!(!ProjectStatus::Closed.can_transition_to(ProjectStatus::Cancelled));
        assert!(!ProjectStatus::Cancelled.can_transition_to(ProjectStatus::Enquiry));
    }

    #[test]
    fn interior_order_lifecycle() {
        assert!(InteriorOrderStatus::Draft.can_transition_to(InteriorOrderStatus::Confirmed));
        assert!(
            InteriorOrderStatus::Confirmed.can_transition_to(InteriorOrderStatus::InProduction)
        );
        assert!(
            InteriorOrderStatus::InProduction.can_transition_to(InteriorOrderStatus::Delivered)
        );
        assert!(InteriorOrderStatus::Draft.can_transition_to(InteriorOrderStatus::Cancelled));

        assert!(!InteriorOrderStatus::Delivered.can_transition_to(InteriorOrderStatus::Cancelled));
        assert!(!InteriorOrderStatus::Cancelled.can_transition_to(InteriorOrderStatus::Draft));
    }

    #[test]
    fn catalog_order_cancellable_before_shipping_only() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Paid.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn material_status_is_forward_only() {
        assert!(MaterialStatus::Ordered.can_transition_to(MaterialStatus::Received));
        assert!(MaterialStatus::Received.can_transition_to(MaterialStatus::Installed));
        assert!(!MaterialStatus::Installed.can_transition_to(MaterialStatus::Ordered));
        assert!(!MaterialStatus::Ordered.can_transition_to(MaterialStatus::Installed));
    }

    #[test]
    fn statuses_serialize_snake_case() {
        let json = serde_json::to_string(&InteriorOrderStatus::InProduction).unwrap();
        assert_eq!(json, "\"in_production\"");

        let parsed: LeadStatus = serde_json::from_str("\"contacted\"").unwrap();
        assert_eq!(parsed, LeadStatus::Contacted);
    }
}
