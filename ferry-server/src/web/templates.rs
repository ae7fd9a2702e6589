//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{RouteSegment, TransportationRoute, format_minutes};
use crate::planner::RouteSuggestions;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Known locations for the from/to pickers.
    pub locations: Vec<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route suggestions fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub message: String,
    pub has_direct_route: bool,
    pub routes: Vec<RouteView>,
}

impl RouteResultsTemplate {
    pub fn from_suggestions(suggestions: &RouteSuggestions) -> Self {
        Self {
            message: suggestions.message.clone(),
            has_direct_route: suggestions.has_direct_route,
            routes: suggestions.routes.iter().map(RouteView::from_route).collect(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub description: String,
    pub total_duration: String,
    pub total_cost: u64,
    pub is_direct: bool,
    pub via: Option<String>,
    pub layover: Option<String>,
    pub legs: Vec<LegView>,
}

impl RouteView {
    /// Create from a domain TransportationRoute.
    pub fn from_route(route: &TransportationRoute) -> Self {
        let layover = (!route.is_direct_route()).then(|| format_minutes(route.layover_minutes()));

        Self {
            description: route.description().to_string(),
            total_duration: format_minutes(route.total_duration_minutes()),
            total_cost: route.total_cost(),
            is_direct: route.is_direct_route(),
            via: route.via().map(|l| l.to_string()),
            layover,
            legs: route.segments().iter().map(LegView::from_segment).collect(),
        }
    }

    /// Badge text shown next to the route.
    pub fn badge(&self) -> &'static str {
        if self.is_direct { "Direct" } else { "1 stop" }
    }
}

/// Segment view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub name: String,
    pub kind: String,
    pub from: String,
    pub to: String,
    pub duration: String,
    pub price: u64,
    pub schedule: String,
    pub amenities: String,
    pub boat_info: Option<String>,
}

impl LegView {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        let name = if segment.name().is_empty() {
            format!("{} to {}", segment.from(), segment.to())
        } else {
            segment.name().to_string()
        };

        Self {
            name,
            kind: segment.kind().to_string(),
            from: segment.from().to_string(),
            to: segment.to().to_string(),
            duration: segment.duration().to_string(),
            price: segment.price(),
            schedule: segment.schedule().to_string(),
            amenities: segment.amenities().join(", "),
            boat_info: segment.boat_info().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, SegmentId, TransportType};

    fn seg(id: u32, from: &str, to: &str, kind: TransportType, dur: &str, price: u64) -> RouteSegment {
        RouteSegment::new(SegmentId(id), from.into(), to.into(), kind, dur, price).unwrap()
    }

    #[test]
    fn route_view_connecting() {
        let route = TransportationRoute::one_stop(
            seg(2, "Male", "Guraidhoo", TransportType::Speedboat, "30 min", 20),
            seg(3, "Guraidhoo", "Maafushi", TransportType::Speedboat, "20 min", 15)
                .with_name("Guraidhoo - Maafushi Shuttle"),
            120,
        )
        .unwrap();

        let view = RouteView::from_route(&route);

        assert_eq!(view.total_duration, "2h 50m");
        assert_eq!(view.via.as_deref(), Some("Guraidhoo"));
        assert_eq!(view.layover.as_deref(), Some("2h"));
        assert_eq!(view.badge(), "1 stop");
        assert_eq!(view.legs[0].name, "Male to Guraidhoo");
        assert_eq!(view.legs[1].name, "Guraidhoo - Maafushi Shuttle");
    }

    #[test]
    fn results_fragment_renders() {
        let route = TransportationRoute::direct(
            seg(1, "Male", "Maafushi", TransportType::Ferry, "1 hour 30 min", 2)
                .with_schedule("Sat-Thu 10:00")
                .with_amenities(vec!["Shade".into(), "Toilet".into()]),
        );
        let suggestions = RouteSuggestions::from_routes(
            vec![route],
            &Location::new("Male"),
            &Location::new("Maafushi"),
            5,
        );

        let html = RouteResultsTemplate::from_suggestions(&suggestions)
            .render()
            .unwrap();

        assert!(html.contains("Direct ferry from Male to Maafushi"));
        assert!(html.contains("1h 30m"));
        assert!(html.contains("Sat-Thu 10:00"));
        assert!(html.contains("Shade, Toilet"));
    }

    #[test]
    fn results_fragment_escapes_names() {
        let route = TransportationRoute::direct(seg(
            1,
            "Male",
            "<script>",
            TransportType::Ferry,
            "45 min",
            2,
        ));
        let suggestions =
            RouteSuggestions::from_routes(vec![route], &Location::new("Male"), &Location::new("<script>"), 5);

        let html = RouteResultsTemplate::from_suggestions(&suggestions)
            .render()
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_renders_locations() {
        let html = IndexTemplate {
            locations: vec!["Maafushi".into(), "Male".into()],
        }
        .render()
        .unwrap();

        assert!(html.contains("<option value=\"Maafushi\">"));
        assert!(html.contains("<option value=\"Male\">"));
    }
}
