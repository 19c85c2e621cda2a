use chrono::Datelike;
use leptos::prelude::*;

use crate::components::icons::{
    ClockIcon, FACEBOOK_GLYPH, GOOGLE_GLYPH, Glyph, PhoneIcon, PinIcon, TIKTOK_GLYPH,
};
use crate::config::{SALON_NAME, SalonInfo, salon};

#[component]
fn FooterItem(label: &'static str, icon: impl IntoView + 'static, children: Children) -> impl IntoView {
    view! {
        <div class="footer__item">
            <span class="footer__icon" aria-hidden="true">{icon}</span>
            <div>
                <p class="footer__label">{label}</p>
                {children()}
            </div>
        </div>
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Social {
    Facebook,
    Google,
    TikTok,
}

impl Social {
    const ALL: [Social; 3] = [Social::Facebook, Social::Google, Social::TikTok];

    fn title(self) -> &'static str {
        match self {
            Social::Facebook => "Facebook",
            Social::Google => "Google Maps",
            Social::TikTok => "TikTok",
        }
    }

    fn aria_label(self) -> &'static str {
        match self {
            Social::Facebook => "Follow us on Facebook",
            Social::Google => "Find us on Google Maps",
            Social::TikTok => "Follow us on TikTok",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Social::Facebook => FACEBOOK_GLYPH,
            Social::Google => GOOGLE_GLYPH,
            Social::TikTok => TIKTOK_GLYPH,
        }
    }

    fn href(self, info: &SalonInfo) -> &'static str {
        match self {
            Social::Facebook => info.facebook_url,
            Social::Google => info.maps_url,
            Social::TikTok => info.tiktok_url,
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let info = salon();
    let year = chrono::Local::now().year();
    let map_title = format!("Map for {}", info.address());
    let phone_href = info.phone.href();
    let socials = Social::ALL.map(|social| (social, social.href(&info)));
    let SalonInfo { phone, street, locality, hours, map_embed_url, maps_url, .. } = info;

    view! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__info">
                    <FooterItem label="Phone" icon=view! { <PhoneIcon/> }>
                        <a class="footer__link" href=phone_href>{phone.display}</a>
                    </FooterItem>

                    <FooterItem label="Address" icon=view! { <PinIcon/> }>
                        <a
                            class="footer__link footer__link--stack"
                            href=maps_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span>{street}</span>
                            <span>{locality}</span>
                        </a>
                    </FooterItem>

                    <FooterItem label="Hours" icon=view! { <ClockIcon/> }>
                        <div class="footer__hours">
                            {hours.iter().map(|line| view! { <span>{*line}</span> }).collect_view()}
                        </div>
                    </FooterItem>
                </div>

                <div class="footer__map">
                    <iframe
                        class="footer__map-frame"
                        src=map_embed_url
                        title=map_title
                        referrerpolicy="no-referrer-when-downgrade"
                        {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        allowfullscreen=true
                    ></iframe>
                </div>

                <div class="footer__socials">
                    {socials
                        .into_iter()
                        .map(|(social, href)| view! {
                            <a
                                class="footer__social"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.aria_label()
                                title=social.title()
                            >
                                <Glyph d=social.glyph()/>
                            </a>
                        })
                        .collect_view()}
                </div>

                <p class="footer__copy">
                    {format!("© {year} {SALON_NAME}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
