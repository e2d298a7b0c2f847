use super::*;
use crate::panels::{LayoutSlot, Orientation, PanelConstraints, PanelGroupLayout, PanelNode};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const KEYBOARD_STEP_PX: i32 = 10;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn axis_coordinate(orientation: Orientation, ev: &web_sys::PointerEvent) -> i32 {
    match orientation {
        Orientation::Horizontal => ev.client_x(),
        Orientation::Vertical => ev.client_y(),
    }
}

fn keyboard_delta(orientation: Orientation, key: &str) -> Option<i32> {
    match (orientation, key) {
        (Orientation::Horizontal, "ArrowLeft") | (Orientation::Vertical, "ArrowUp") => {
            Some(-KEYBOARD_STEP_PX)
        }
        (Orientation::Horizontal, "ArrowRight") | (Orientation::Vertical, "ArrowDown") => {
            Some(KEYBOARD_STEP_PX)
        }
        _ => None,
    }
}

/// Inline flex style for a panel. `size_px` pins the panel once the user has resized its group.
pub(crate) fn panel_style(
    orientation: Orientation,
    constraints: &PanelConstraints,
    size_px: Option<u32>,
) -> String {
    let dimension = orientation.dimension();
    let mut style = match (size_px, constraints.default_size) {
        (Some(pixels), _) => format!("flex:0 0 {pixels}px;"),
        (None, Some(size)) => format!("flex:0 1 {};", size.css()),
        (None, None) => "flex:1 1 0;".to_string(),
    };
    if size_px == Some(0) {
        style.push_str("overflow:hidden;");
        return style;
    }
    if let Some(min) = constraints.min_size {
        style.push_str(&format!("min-{dimension}:{};", min.css()));
    }
    if let Some(max) = constraints.max_size {
        style.push_str(&format!("max-{dimension}:{};", max.css()));
    }
    style
}

#[component]
/// Flex container laying out resizable panels along one axis.
pub fn ResizablePanelGroup(
    id: &'static str,
    orientation: Orientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-panel-group", layout_class)
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="panel-group"
            data-ui-orientation=orientation.token()
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
            on:pointercancel=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// One panel inside a [`ResizablePanelGroup`].
pub fn ResizablePanel(
    id: &'static str,
    /// Orientation of the enclosing group.
    orientation: Orientation,
    constraints: PanelConstraints,
    #[prop(optional, into)] size_px: MaybeSignal<Option<u32>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let size_px = Signal::derive(move || size_px.get());
    let collapsed = move || constraints.collapsible && size_px.get() == Some(0);

    view! {
        <div
            id=id
            class=merge_layout_class("ui-resizable-panel", layout_class)
            style=move || panel_style(orientation, &constraints, size_px.get())
            data-ui-primitive="true"
            data-ui-kind="resizable-panel"
            data-ui-collapsible=bool_token(constraints.collapsible)
            data-ui-collapsed=move || bool_token(collapsed())
        >
            {children()}
        </div>
    }
}

#[component]
/// Drag handle between two panels of a [`ResizablePanelGroup`].
pub fn ResizableHandle(
    /// Orientation of the enclosing group.
    orientation: Orientation,
    #[prop(optional)] with_handle: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let separator_orientation = match orientation {
        Orientation::Horizontal => Orientation::Vertical,
        Orientation::Vertical => Orientation::Horizontal,
    };

    view! {
        <div
            class=merge_layout_class("ui-resizable-handle", layout_class)
            role="separator"
            tabindex="0"
            aria-orientation=separator_orientation.token()
            data-ui-primitive="true"
            data-ui-kind="resizable-handle"
            data-ui-orientation=orientation.token()
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {with_handle.then(|| view! { <div data-ui-slot="grip" aria-hidden="true"></div> })}
        </div>
    }
}

#[derive(Debug, Clone)]
struct DragSession {
    handle: usize,
    origin: i32,
    start: PanelGroupLayout,
}

#[component]
/// Renders a [`PanelNode`] tree as nested resizable groups.
///
/// Leaf slots are filled by `render_slot`. Groups size their panels with CSS until the first drag
/// or arrow-key nudge, then pin them to pixel sizes from [`PanelGroupLayout`].
pub fn PanelLayoutView(node: PanelNode, render_slot: Callback<LayoutSlot, View>) -> impl IntoView {
    render_node(node, render_slot)
}

fn render_node(node: PanelNode, render_slot: Callback<LayoutSlot, View>) -> View {
    let constraints = node.panel_constraints();
    match node {
        PanelNode::Group {
            id,
            orientation,
            children,
        } => view! {
            <PanelGroupView
                id=id
                orientation=orientation
                constraints=constraints
                nodes=children
                render_slot=render_slot
            />
        }
        .into_view(),
        PanelNode::Panel { body, .. } => render_node(*body, render_slot),
        PanelNode::Handle => ().into_view(),
        PanelNode::Slot(slot) => view! {
            <div class="ui-panel-slot" data-ui-slot=slot.token()>
                {render_slot.call(slot)}
            </div>
        }
        .into_view(),
    }
}

#[component]
fn PanelGroupView(
    id: &'static str,
    orientation: Orientation,
    constraints: Vec<PanelConstraints>,
    nodes: Vec<PanelNode>,
    render_slot: Callback<LayoutSlot, View>,
) -> impl IntoView {
    let group_ref = create_node_ref::<html::Div>();
    let layout = create_rw_signal(None::<PanelGroupLayout>);
    let drag = create_rw_signal(None::<DragSession>);
    let constraints = store_value(constraints);

    let measured_layout = move || -> Option<PanelGroupLayout> {
        if let Some(current) = layout.get_untracked() {
            return Some(current);
        }
        let element = group_ref.get_untracked()?;
        let extent = match orientation {
            Orientation::Horizontal => element.client_width(),
            Orientation::Vertical => element.client_height(),
        };
        let extent = u32::try_from(extent).ok()?;
        Some(constraints.with_value(|constraints| PanelGroupLayout::new(extent, constraints)))
    };

    let begin_drag = move |handle: usize, ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(start) = measured_layout() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        layout.set(Some(start.clone()));
        drag.set(Some(DragSession {
            handle,
            origin: axis_coordinate(orientation, &ev),
            start,
        }));
    };
    let nudge = move |handle: usize, ev: KeyboardEvent| {
        let Some(delta) = keyboard_delta(orientation, &ev.key()) else {
            return;
        };
        let Some(mut next) = measured_layout() else {
            return;
        };
        ev.prevent_default();
        next.resize(handle, delta);
        layout.set(Some(next));
    };
    let on_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        let mut next = session.start.clone();
        next.resize(session.handle, axis_coordinate(orientation, &ev) - session.origin);
        layout.set(Some(next));
    });
    let on_end = Callback::new(move |_: web_sys::PointerEvent| drag.set(None));

    let mut panel_index = 0;
    let mut handle_index = 0;
    let panels = nodes
        .into_iter()
        .map(|child| match child {
            PanelNode::Panel {
                id,
                constraints,
                body,
            } => {
                let index = panel_index;
                panel_index += 1;
                let size_px = Signal::derive(move || {
                    layout.with(|layout| {
                        layout
                            .as_ref()
                            .and_then(|layout| layout.sizes().get(index).copied())
                    })
                });
                view! {
                    <ResizablePanel
                        id=id
                        orientation=orientation
                        constraints=constraints
                        size_px=size_px
                    >
                        {render_node(*body, render_slot)}
                    </ResizablePanel>
                }
                .into_view()
            }
            PanelNode::Handle => {
                let index = handle_index;
                handle_index += 1;
                view! {
                    <ResizableHandle
                        orientation=orientation
                        with_handle=true
                        on_pointerdown=Callback::new(move |ev| begin_drag(index, ev))
                        on_keydown=Callback::new(move |ev| nudge(index, ev))
                    />
                }
                .into_view()
            }
            other => render_node(other, render_slot),
        })
        .collect_view();

    view! {
        <ResizablePanelGroup
            id=id
            orientation=orientation
            node_ref=group_ref
            on_pointermove=on_move
            on_pointerup=on_end
        >
            {panels}
        </ResizablePanelGroup>
    }
}
