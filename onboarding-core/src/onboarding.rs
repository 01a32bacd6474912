//! # Onboarding 模块
//!
//! 引导页根组件：把配置、回调、渲染器、过渡控制器和宿主能力连接起来。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! let mut onboarding = Onboarding::builder(options)
//!     .on_done(|| println!("done"))
//!     .page_index_callback(|index| println!("page {index}"))
//!     .build(list, status_bar)?;
//!
//! // 宿主事件
//! onboarding.on_viewable_items_changed(&[ViewToken::viewable(1)]);
//! onboarding.press(Intent::Next)?;
//!
//! // 每帧
//! onboarding.update(dt);
//! let frame = onboarding.frame();
//! ```

use std::time::Duration;

use tracing::debug;

use crate::animation::{Animator, TimelineAnimator};
use crate::color::Color;
use crate::error::OnboardingResult;
use crate::host::{BarStyle, PagingList, StatusBarController, ViewToken};
use crate::options::OnboardingOptions;
use crate::pagination::{ControlVisibility, Intent};
use crate::render::{
    ButtonProps, ButtonRenderer, DotProps, DotRenderer, FrameView, PageView, PageViewContext,
    PaginationView, Renderers, Theme,
};
use crate::state::{PaginationState, TransitionPhase};
use crate::transition::{PageIndexCallback, TransitionController};

/// 无参回调（跳过 / 完成）
pub type Callback = Box<dyn FnMut()>;

/// 引导页构建器
pub struct OnboardingBuilder {
    options: OnboardingOptions,
    on_skip: Option<Callback>,
    on_done: Option<Callback>,
    page_index_callback: Option<PageIndexCallback>,
    renderers: Renderers,
    animator: Option<Box<dyn Animator>>,
}

impl OnboardingBuilder {
    fn new(options: OnboardingOptions) -> Self {
        Self {
            options,
            on_skip: None,
            on_done: None,
            page_index_callback: None,
            renderers: Renderers::default(),
            animator: None,
        }
    }

    /// 跳过按钮回调（设置了 `skip_to_page` 时不会被调用）
    pub fn on_skip(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_skip = Some(Box::new(callback));
        self
    }

    /// 完成按钮回调
    pub fn on_done(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_done = Some(Box::new(callback));
        self
    }

    /// 每次翻页后以新页索引调用
    pub fn page_index_callback(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.page_index_callback = Some(Box::new(callback));
        self
    }

    pub fn skip_button(mut self, renderer: impl ButtonRenderer + 'static) -> Self {
        self.renderers.skip = Box::new(renderer);
        self
    }

    pub fn next_button(mut self, renderer: impl ButtonRenderer + 'static) -> Self {
        self.renderers.next = Box::new(renderer);
        self
    }

    pub fn done_button(mut self, renderer: impl ButtonRenderer + 'static) -> Self {
        self.renderers.done = Box::new(renderer);
        self
    }

    pub fn dot(mut self, renderer: impl DotRenderer + 'static) -> Self {
        self.renderers.dot = Box::new(renderer);
        self
    }

    /// 替换默认的时间轴动画器
    pub fn animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    /// 校验配置并挂载
    pub fn build(
        self,
        paging_list: impl PagingList + 'static,
        status_bar: impl StatusBarController + 'static,
    ) -> OnboardingResult<Onboarding> {
        self.options.validate()?;

        let colors = self
            .options
            .pages
            .iter()
            .map(|page| page.background_color)
            .collect();
        let animator = self
            .animator
            .unwrap_or_else(|| Box::new(TimelineAnimator::new(self.options.easing)));
        let mut controller = TransitionController::with_animator(
            colors,
            self.options.transition_duration(),
            animator,
        )?;
        if let Some(callback) = self.page_index_callback {
            controller.set_page_index_callback(callback);
        }

        let mut onboarding = Onboarding {
            options: self.options,
            controller,
            paging_list: Box::new(paging_list),
            status_bar: Box::new(status_bar),
            on_skip: self.on_skip,
            on_done: self.on_done,
            renderers: self.renderers,
            width: None,
        };
        onboarding.sync_status_bar();
        Ok(onboarding)
    }
}

impl std::fmt::Debug for OnboardingBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingBuilder")
            .field("pages", &self.options.pages.len())
            .field("on_skip", &self.on_skip.is_some())
            .field("on_done", &self.on_done.is_some())
            .finish_non_exhaustive()
    }
}

/// 引导页
pub struct Onboarding {
    options: OnboardingOptions,
    controller: TransitionController,
    paging_list: Box<dyn PagingList>,
    status_bar: Box<dyn StatusBarController>,
    on_skip: Option<Callback>,
    on_done: Option<Callback>,
    renderers: Renderers,
    /// 宿主上报的容器宽度（横竖屏切换时更新）
    width: Option<f32>,
}

impl Onboarding {
    pub fn builder(options: OnboardingOptions) -> OnboardingBuilder {
        OnboardingBuilder::new(options)
    }

    pub fn options(&self) -> &OnboardingOptions {
        &self.options
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn state(&self) -> &PaginationState {
        self.controller.state()
    }

    pub fn num_pages(&self) -> usize {
        self.options.pages.len()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.controller.phase()
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    // ========== 宿主事件 ==========

    /// 列表可见性变化
    ///
    /// 可见阈值为 100%，同一时刻至多一个条目可见，取第一个可见条目。
    pub fn on_viewable_items_changed(&mut self, tokens: &[ViewToken]) -> bool {
        let index = tokens
            .iter()
            .find(|token| token.is_viewable)
            .and_then(|token| token.index);
        self.on_visible_page_changed(index)
    }

    /// 可见页变化，返回是否真正翻页
    pub fn on_visible_page_changed(&mut self, index: Option<usize>) -> bool {
        let changed = self.controller.on_visible_page_changed(index);
        if changed {
            self.sync_status_bar();
        }
        changed
    }

    /// 处理分页控件的按下事件
    pub fn press(&mut self, intent: Intent) -> OnboardingResult<()> {
        debug!(?intent, page = self.controller.current_page_index(), "分页控件按下");
        match intent {
            Intent::Next => {
                let target = self.controller.current_page_index() + 1;
                self.controller
                    .advance_to_index(target, self.paging_list.as_mut())
            }
            Intent::Skip => match self.options.skip_to_page {
                Some(target) => {
                    self.reset_status_bar();
                    self.controller
                        .advance_to_index(target, self.paging_list.as_mut())
                }
                None => {
                    self.leave(intent);
                    Ok(())
                }
            },
            Intent::Done => {
                self.leave(intent);
                Ok(())
            }
        }
    }

    /// 容器布局变化
    pub fn on_layout(&mut self, width: f32) {
        self.width = Some(width);
    }

    /// 推进过渡动画
    pub fn update(&mut self, dt: Duration) -> TransitionPhase {
        self.controller.update(dt)
    }

    // ========== 派生值 ==========

    /// 当前帧的背景色
    pub fn background_color(&self) -> Color {
        self.controller.current_background_color()
    }

    /// 当前页对应的状态栏样式
    pub fn bar_style(&self) -> BarStyle {
        BarStyle::for_background(&self.controller.current_page_color())
    }

    pub fn control_visibility(&self) -> ControlVisibility {
        ControlVisibility::compute(
            self.controller.current_page_index(),
            self.num_pages(),
            self.options.flags(),
        )
    }

    /// 分页控件视图
    pub fn pagination_view(&self) -> PaginationView {
        let current = self.controller.current_page_index();
        let is_light = self.controller.current_page_color().is_light();
        let theme = Theme::for_background(is_light);
        let visibility = self.control_visibility();

        let dots = (0..self.num_pages())
            .map(|index| {
                self.renderers.dot.render(&DotProps {
                    index,
                    selected: index == current,
                    is_light,
                    theme: &theme,
                })
            })
            .collect();

        let buttons = visibility
            .visible_intents()
            .into_iter()
            .map(|intent| {
                let label = match intent {
                    Intent::Skip => Some(&self.options.skip_label),
                    Intent::Next => Some(&self.options.next_label),
                    Intent::Done => None,
                };
                self.renderers.button(intent).render(&ButtonProps {
                    intent,
                    is_light,
                    is_last_page: visibility.is_last_page,
                    label,
                    allow_font_scaling: self.options.allow_font_scaling_buttons,
                    theme: &theme,
                })
            })
            .collect();

        PaginationView {
            is_light,
            is_last_page: visibility.is_last_page,
            dots,
            buttons,
        }
    }

    /// 当前帧的完整视图
    pub fn frame(&self) -> FrameView {
        let ctx = PageViewContext {
            width: self.width,
            title_styles: self.options.title_styles.as_ref(),
            subtitle_styles: self.options.sub_title_styles.as_ref(),
            allow_font_scaling: self.options.allow_font_scaling_text,
        };

        FrameView {
            background: self.background_color(),
            bar_style: self.options.control_status_bar.then(|| self.bar_style()),
            phase: self.phase(),
            state: *self.controller.state(),
            pages: self
                .options
                .pages
                .iter()
                .enumerate()
                .map(|(index, page)| PageView::build(index, page, &ctx))
                .collect(),
            pagination: self
                .options
                .show_pagination
                .then(|| self.pagination_view()),
        }
    }

    // ========== 内部 ==========

    fn sync_status_bar(&mut self) {
        if self.options.control_status_bar {
            let style = self.bar_style();
            self.status_bar.set_style(style, false);
        }
    }

    /// 离开引导页（跳过 / 完成）
    ///
    /// 没有注册回调时什么也不做；否则先把状态栏还原为默认样式再调用回调。
    fn leave(&mut self, intent: Intent) {
        let callback = match intent {
            Intent::Skip => self.on_skip.as_mut(),
            Intent::Done => self.on_done.as_mut(),
            Intent::Next => None,
        };
        let Some(callback) = callback else {
            debug!(?intent, "未注册回调，忽略");
            return;
        };

        if self.options.control_status_bar {
            self.status_bar.set_style(BarStyle::Default, true);
        }
        callback();
    }

    /// 离开当前页前把状态栏还原为默认样式
    fn reset_status_bar(&mut self) {
        if self.options.control_status_bar {
            self.status_bar.set_style(BarStyle::Default, true);
        }
    }
}

impl std::fmt::Debug for Onboarding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Onboarding")
            .field("controller", &self.controller)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
