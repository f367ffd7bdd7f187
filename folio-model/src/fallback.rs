//! Built-in showcase entries used when the hosted catalogue is empty.

use crate::portfolio::PortfolioItem;

/// The six default portfolio cards shown on the landing page.
pub fn fallback_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem::image(
            "photographer",
            "/assets/portfolio-photographer.jpg",
            "Sophia Laurent",
            "Photography Portfolio",
        ),
        PortfolioItem::image(
            "startup",
            "/assets/portfolio-startup.jpg",
            "Nexus AI",
            "Startup Landing",
        ),
        PortfolioItem::image(
            "wedding",
            "/assets/portfolio-wedding.jpg",
            "Eternal Moments",
            "Wedding Studio",
        ),
        PortfolioItem::image(
            "personal",
            "/assets/portfolio-personal.jpg",
            "Marcus Chen",
            "Personal Brand",
        ),
        PortfolioItem::image(
            "gym",
            "/assets/portfolio-gym.jpg",
            "Iron Peak Fitness",
            "Gym Website",
        ),
        PortfolioItem::image(
            "agency",
            "/assets/portfolio-agency.jpg",
            "Stellar Creative",
            "Digital Agency",
        ),
    ]
}
