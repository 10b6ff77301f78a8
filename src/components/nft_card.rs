//! NFT Card Component

use leptos::prelude::*;

use crate::models::Nft;

#[component]
pub fn NftCard(nft: Nft, #[prop(optional, into)] on_trade: Option<Callback<String>>) -> impl IntoView {
    let (liked, set_liked) = signal(false);

    let id = nft.id.clone();
    let name = nft.name.clone();
    let price = nft.price.clone();
    let owned = nft.owned;

    view! {
        <div class="card nft-card">
            <div class="nft-image-wrap">
                <img src=nft.image.clone() alt=name.clone() class="nft-image" />
                <div class="nft-badges">
                    <span class=nft.rarity.badge_class()>{nft.rarity.label()}</span>
                    <span class=nft.category.badge_class()>{nft.category.label()}</span>
                </div>
                <button
                    class=move || if liked.get() { "like-btn liked" } else { "like-btn" }
                    on:click=move |_| set_liked.update(|liked| *liked = !*liked)
                >
                    "♥"
                </button>
            </div>
            <div class="nft-body">
                <h3 class="nft-name" title=name.clone()>{name.clone()}</h3>
                <p class="nft-collection">{nft.collection.clone()}</p>
                <div class="nft-footer">
                    {price.map(|price| view! {
                        <div class="nft-price">
                            <p class="stat-label">"Price"</p>
                            <p class="nft-price-value">{format!("{} ETH", price)}</p>
                        </div>
                    })}
                    {on_trade.map(|on_trade| {
                        let id = id.clone();
                        view! {
                            <button class="btn primary small" on:click=move |_| on_trade.run(id.clone())>
                                {if owned { "Trade" } else { "Propose Trade" }}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
