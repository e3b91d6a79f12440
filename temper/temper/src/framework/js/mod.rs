pub mod price;

use crate::config::StorefrontConfig;
use crate::framework::Region;
use crate::framework::dom::modal::modal_dismiss;
use crate::framework::dom::on_dom_ready;
use crate::framework::dom::sidebar::toggle_list_fn;

/// The page script: shared functions followed by a single startup listener
/// registering each requested region.
pub fn storefront_js(config: &StorefrontConfig, regions: &[Region]) -> String {
    let mut sections = vec![price::price_js()];
    if regions.contains(&Region::FilterLists) {
        sections.push(format!(
            "// ---- Sidebar Lists ----\n\n{}",
            toggle_list_fn(&config.sidebar)
        ));
    }

    let mut seen = Vec::with_capacity(regions.len());
    let mut blocks = regions
        .iter()
        .filter(|region| {
            if seen.contains(*region) {
                return false;
            }
            seen.push(**region);
            true
        })
        .map(|region| region.binding(config))
        .collect::<Vec<_>>();
    if regions
        .iter()
        .any(|region| matches!(region, Region::CartModal | Region::OrderModal))
    {
        blocks.push(format!("// modal-dismiss\n{}", modal_dismiss(&config.modal)));
    }
    sections.push(format!("// ---- Startup ----\n\n{}", on_dom_ready(&blocks)));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn single_startup_listener_for_all_regions() {
        let regions = Region::iter().collect::<Vec<_>>();
        let js = storefront_js(&StorefrontConfig::default(), &regions);
        assert_eq!(js.matches("DOMContentLoaded").count(), 1);
        for region in regions {
            assert!(js.contains(&format!("// {region}\n")));
        }
    }

    #[test]
    fn duplicate_regions_are_bound_once() {
        let js = storefront_js(
            &StorefrontConfig::default(),
            &[Region::Menu, Region::Menu, Region::FilterLists, Region::FilterLists],
        );
        assert_eq!(js.matches("// menu\n").count(), 1);
        assert_eq!(js.matches("// filter-lists\n").count(), 1);
        assert_eq!(js.matches("function toggleList(").count(), 1);
    }

    #[test]
    fn modal_dismissal_bound_once_for_both_triggers() {
        let config = StorefrontConfig::default();
        let both = storefront_js(&config, &[Region::CartModal, Region::OrderModal]);
        assert_eq!(both.matches("document.getElementById(\"close-modal\")").count(), 1);
        assert_eq!(both.matches("// modal-dismiss\n").count(), 1);

        let cart_only = storefront_js(&config, &[Region::CartModal]);
        assert_eq!(cart_only.matches("// modal-dismiss\n").count(), 1);

        let without_modal = storefront_js(&config, &[Region::Menu]);
        assert!(!without_modal.contains("close-modal"));
    }

    #[test]
    fn toggle_list_only_when_sidebar_requested() {
        let js = storefront_js(&StorefrontConfig::default(), &[Region::PriceInputs]);
        assert!(!js.contains("function toggleList("));
        assert!(js.contains("function formatPrice(raw)"));
    }
}
