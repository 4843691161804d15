//! Installation and first-steps guide.

use leptos::prelude::*;

use crate::components::component_viewer::CopyButton;
use crate::components::page_header::PageHeader;
use crate::util::markdown;

const INSTALL_COMMAND: &str = "npx okami-ui@latest init";
const ADD_COMMAND: &str = "npx okami-ui@latest add button card input";

const GUIDE: &str = r#"
## Requirements

- Node.js 18 or newer
- A project with Tailwind CSS configured

## Initialize

Run the init command in your project root. It writes `okami.json`, adds the
design tokens to your stylesheet and creates `components/ui/`.

## Add components

Components are copied into your project so you own the source. Add only what
you use; everything is tree-shakeable.

## Use them

```tsx
import { Button } from "@/components/ui/button";

export default function App() {
  return <Button variant="outline">Hello Okami</Button>;
}
```

| Step | Command |
|------|---------|
| Init | `npx okami-ui@latest init` |
| Add  | `npx okami-ui@latest add <name>` |
"#;

#[component]
pub fn GettingStartedPage() -> impl IntoView {
    let guide_html = markdown::render(GUIDE);

    view! {
        <div class="getting-started">
            <PageHeader
                title="Getting Started"
                badge="Documentation"
                description="Install Okami UI and render your first component in a few minutes."
            />
            <div class="card command">
                <code>{INSTALL_COMMAND}</code>
                <CopyButton text=INSTALL_COMMAND/>
            </div>
            <div class="card command">
                <code>{ADD_COMMAND}</code>
                <CopyButton text=ADD_COMMAND/>
            </div>
            <article class="prose" inner_html=guide_html></article>
        </div>
    }
}
